/// Row type for the `contacts` table. Kept separate from the
/// `portfolio-types` wire model so the storage layer stays independent.
pub struct ContactRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: String,
    pub read: bool,
}
