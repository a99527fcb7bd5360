//! Row structs for the tables this crate owns. They map one-to-one onto
//! columns; timestamps stay as the TEXT SQLite hands back and get parsed
//! by whoever needs a real datetime.

pub struct SecurityPinRow {
    pub id: i64,
    pub encrypted_pin: String,
    pub created_at: String,
    pub updated_at: String,
}
