use uuid::Uuid;

// Reducers never call this; ids are minted by constructors on the caller side.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
