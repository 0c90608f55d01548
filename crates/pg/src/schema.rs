/// Schema metadata for PostgreSQL tables.
///
/// Provides compile-time SQL generation for table creation, clearing
/// and bulk loading. All methods return `&'static str` so statements can
/// be assembled with [`const_format::concatcp!`] and never allocate.
///
/// # Design
///
/// This trait contains no I/O operations; it purely describes table structure.
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns the comma-separated column list in storage order.
    fn fields() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns the statement that removes every row.
    fn deletes() -> &'static str;
    /// Returns the `COPY ... FROM STDIN BINARY` command for bulk loading.
    fn copy() -> &'static str;
    /// Returns PostgreSQL column types for binary COPY protocol.
    fn columns() -> &'static [tokio_postgres::types::Type];
}
