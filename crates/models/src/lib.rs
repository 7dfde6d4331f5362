pub mod errors;
pub mod db;
pub mod de;
pub mod upsert;
pub mod business;
pub mod officer;
pub mod customer;

#[cfg(test)]
mod tests;
