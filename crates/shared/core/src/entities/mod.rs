mod dispatch;
mod layout;
mod line;
mod server;
mod station;
mod station_status;
mod timetable;
mod train;

pub use dispatch::{DispatchAssignment, DispatcherRef};
pub use layout::{Layout, LayoutContent, LayoutStation};
pub use line::{EntranceSignal, LineStation, LineTopology, RemoteStation, SignalRule, TrackSegment};
pub use server::ServerInfo;
pub use station::Station;
pub use station_status::StationStatus;
pub use timetable::{TimetableEntry, TimetableStop};
pub use train::{LiveTrain, TrainTelemetry};
