/// The users listing is a pass-through of the table's rows; no columns are
/// assumed.
pub const LIST_USERS_SQL: &str = "SELECT * FROM users";
