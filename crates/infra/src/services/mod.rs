mod dispatch;

pub use dispatch::{
    DeliveryStatus, IDispatchTransport, LogDispatchTransport, RecordingDispatchTransport,
};
