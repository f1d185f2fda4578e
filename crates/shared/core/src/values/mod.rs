mod envelope;
mod raw_id;

pub use envelope::DataEnvelope;
pub use raw_id::{
    RawId, deserialize_null_as_empty, deserialize_opt_point_id, deserialize_point_id,
    deserialize_train_number,
};

/// Topology point identifier (stations and other network points)
pub type PointId = i64;

/// Game server code, e.g. `en1`
pub type ServerCode = String;

/// Train number shared by timetable entries and live trains
pub type TrainNumber = String;

/// Opaque dispatcher identity (a Steam ID upstream)
pub type DispatcherId = String;
