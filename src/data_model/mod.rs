pub mod availability;
pub mod mentorship_request;
pub mod session;
pub mod user;

/// Sentinel for records that have not been stored yet; the store assigns
/// the real id on the first put.
pub fn unset_id() -> u64 {
    u64::MAX
}

/// Anything the store can persist: a collection name and a numeric id.
pub trait Entity {
    const COLLECTION: &'static str;

    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
}
