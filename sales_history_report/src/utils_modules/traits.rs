use crate::common::*;

/* Source of "now" for every report that depends on the current date */
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
}
