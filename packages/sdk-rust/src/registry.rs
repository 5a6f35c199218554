//! The embedded schema registry.
//!
//! The four `OpenWeight` schema documents ship inside the crate and are
//! compiled into a process-wide [`SchemaStore`] on first use. The store is
//! immutable after that, so [`schema_store`] can be called freely from any
//! thread.

use std::sync::OnceLock;

use openweight_core::{SchemaDocument, SchemaStore};

/// Identity of the workout log schema.
pub const WORKOUT_LOG: &str = "workout-log";
/// Identity of the workout template schema.
pub const WORKOUT_TEMPLATE: &str = "workout-template";
/// Identity of the program schema.
pub const PROGRAM: &str = "program";
/// Identity of the lifter profile schema.
pub const LIFTER_PROFILE: &str = "lifter-profile";

/// Raw JSON text of the workout log schema, for external tooling
/// (editors, other validators, docs generators).
pub const WORKOUT_LOG_SCHEMA: &str = include_str!("../schemas/workout-log.schema.json");
/// Raw JSON text of the workout template schema.
pub const WORKOUT_TEMPLATE_SCHEMA: &str =
    include_str!("../schemas/workout-template.schema.json");
/// Raw JSON text of the program schema.
pub const PROGRAM_SCHEMA: &str = include_str!("../schemas/program.schema.json");
/// Raw JSON text of the lifter profile schema.
pub const LIFTER_PROFILE_SCHEMA: &str = include_str!("../schemas/lifter-profile.schema.json");

/// The shared store holding all embedded `OpenWeight` schemas.
///
/// The first call compiles and registers every document; later calls return
/// the same store. The embedded documents are fixed at build time, so
/// compilation and registration cannot fail at runtime.
pub fn schema_store() -> &'static SchemaStore {
    static STORE: OnceLock<SchemaStore> = OnceLock::new();
    STORE.get_or_init(|| {
        let mut store = SchemaStore::new();
        // The program schema references workout-template externally;
        // resolution is lazy, so registration order does not matter.
        for source in [
            WORKOUT_LOG_SCHEMA,
            WORKOUT_TEMPLATE_SCHEMA,
            PROGRAM_SCHEMA,
            LIFTER_PROFILE_SCHEMA,
        ] {
            let document = source
                .parse::<SchemaDocument>()
                .expect("embedded schema compiles");
            store
                .register(document)
                .expect("embedded schema identities are distinct");
        }
        tracing::debug!(count = store.len(), "initialized embedded schema store");
        store
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_holds_all_four_schemas() {
        let store = schema_store();
        assert_eq!(
            store.identities(),
            vec![LIFTER_PROFILE, PROGRAM, WORKOUT_LOG, WORKOUT_TEMPLATE]
        );
    }

    #[test]
    fn repeated_calls_return_the_same_store() {
        let a: *const SchemaStore = schema_store();
        let b: *const SchemaStore = schema_store();
        assert_eq!(a, b);
    }

    #[test]
    fn exported_schema_text_is_valid_json_with_matching_identity() {
        for (source, identity) in [
            (WORKOUT_LOG_SCHEMA, WORKOUT_LOG),
            (WORKOUT_TEMPLATE_SCHEMA, WORKOUT_TEMPLATE),
            (PROGRAM_SCHEMA, PROGRAM),
            (LIFTER_PROFILE_SCHEMA, LIFTER_PROFILE),
        ] {
            let document = source.parse::<SchemaDocument>().expect("schema text compiles");
            assert_eq!(document.identity(), identity);
        }
    }

    #[test]
    fn identities_match_document_identities() {
        let store = schema_store();
        for identity in [WORKOUT_LOG, WORKOUT_TEMPLATE, PROGRAM, LIFTER_PROFILE] {
            let document = store.get(identity).expect("registered");
            assert_eq!(document.identity(), identity);
        }
    }
}
