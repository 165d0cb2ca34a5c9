pub mod hr_query_postgres;

pub use hr_query_postgres::HrQueryPostgres;
