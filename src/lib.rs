pub mod collector;
pub mod enrich;
pub mod errors;
pub mod imdbapi;
pub mod oscars;
pub mod report;

pub mod util {
    pub mod db;
    pub mod env;
}
