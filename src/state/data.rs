use crate::args::Args;
use crate::state::store::Store;

/// Everything a request handler needs: the store handle plus the runtime
/// configuration it was started with.
pub struct Data {
    pub rw: Box<dyn Store>,
    pub args: Args,
}

impl Data {
    pub fn new(rw: Box<dyn Store>, args: Args) -> Self {
        Self { rw, args }
    }
}
