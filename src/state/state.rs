use crate::state::data::Data;
use tokio::sync::Mutex;

/// Process-wide shared state. Handlers lock the server for the duration of
/// their single store operation; there is no finer-grained coordination.
pub struct State {
    pub server: Mutex<Data>,
}

impl State {
    pub fn new(srv: Data) -> Self {
        Self {
            server: Mutex::new(srv),
        }
    }
}
