use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::values::{
    PointId, RawId, TrainNumber, deserialize_null_as_empty, deserialize_train_number,
};

/// One scheduled movement of a train
///
/// Only the train number and the route are typed. Every other attribute is
/// kept in `extra` exactly as the server sent it, `null` values included, and
/// read through the accessors below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableEntry {
    #[serde(rename = "trainNoLocal", deserialize_with = "deserialize_train_number")]
    pub train_no_local: TrainNumber,
    /// Route stops in running order
    #[serde(
        default,
        deserialize_with = "deserialize_null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub timetable: Vec<TimetableStop>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TimetableEntry {
    pub fn new(train_no_local: impl Into<TrainNumber>) -> Self {
        Self {
            train_no_local: train_no_local.into(),
            timetable: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_stop(mut self, stop: TimetableStop) -> Self {
        self.timetable.push(stop);
        self
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }

    /// Scheduled stop at a topology point, if the route passes it
    pub fn stop_at(&self, point_id: PointId) -> Option<&TimetableStop> {
        self.timetable
            .iter()
            .find(|stop| stop.point_id() == Some(point_id))
    }

    /// Attribute rendered as text; numbers are accepted
    pub fn text(&self, key: &str) -> Option<String> {
        text_of(self.extra.get(key)?)
    }

    pub fn train_no_international(&self) -> Option<String> {
        self.text("trainNoInternational")
    }

    pub fn train_name(&self) -> Option<String> {
        self.text("trainName")
    }

    pub fn start_station(&self) -> Option<String> {
        self.text("startStation")
    }

    pub fn starts_at(&self) -> Option<String> {
        self.text("startsAt")
    }

    pub fn end_station(&self) -> Option<String> {
        self.text("endStation")
    }

    pub fn ends_at(&self) -> Option<String> {
        self.text("endsAt")
    }

    pub fn loco_type(&self) -> Option<String> {
        self.text("locoType")
    }

    pub fn continues_as(&self) -> Option<String> {
        self.text("continuesAs")
    }
}

/// A point on a train's scheduled route
///
/// Stops are re-emitted verbatim. The accessors tolerate the string/number
/// drift seen across servers and return `None` for anything unusable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimetableStop {
    pub fields: Map<String, Value>,
}

impl TimetableStop {
    pub fn new(name_of_point: impl Into<String>, point_id: PointId) -> Self {
        Self::default()
            .with("nameOfPoint", name_of_point.into())
            .with("pointId", point_id)
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn with_times(mut self, arrival: Option<&str>, departure: Option<&str>) -> Self {
        for (key, time) in [("arrivalTime", arrival), ("departureTime", departure)] {
            match time {
                Some(time) => self.fields.insert(key.to_string(), Value::from(time)),
                None => self.fields.remove(key),
            };
        }
        self
    }

    pub fn name_of_point(&self) -> Option<&str> {
        self.str_field("nameOfPoint")
    }

    /// The point identifier as sent, numeric or not
    pub fn point(&self) -> Option<RawId> {
        RawId::from_value(self.fields.get("pointId")?)
    }

    /// Numeric point identifier, the only kind the topology can match
    pub fn point_id(&self) -> Option<PointId> {
        self.point()?.as_numeric()
    }

    pub fn arrival_time(&self) -> Option<&str> {
        self.str_field("arrivalTime")
    }

    pub fn departure_time(&self) -> Option<&str> {
        self.str_field("departureTime")
    }

    pub fn stop_type(&self) -> Option<&str> {
        self.str_field("stopType")
    }

    pub fn platform(&self) -> Option<RawId> {
        RawId::from_value(self.fields.get("platform")?)
    }

    pub fn track(&self) -> Option<RawId> {
        RawId::from_value(self.fields.get("track")?)
    }

    pub fn line(&self) -> Option<RawId> {
        RawId::from_value(self.fields.get("line")?)
    }

    /// Kilometre post; some servers send it as a string
    pub fn mileage(&self) -> Option<f64> {
        match self.fields.get("mileage")? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key)?.as_str()
    }
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
