// Helper for generating UUIDv7 (timestamp-sortable UUIDs)
//
// Token records are time-ordered (the latest record per user decides
// reuse vs re-issue), so their IDs are generated app-side as UUIDv7.
// The users table has no ordering requirement and keeps PG's
// gen_random_uuid() (v4).

use uuid::Uuid;

/// Generate a new UUIDv7 (timestamp-sortable).
pub fn uuidv7() -> Uuid {
    Uuid::now_v7()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuidv7_is_valid() {
        let id = uuidv7();
        assert_eq!(id.get_version(), Some(::uuid::Version::SortRand));
    }
}
