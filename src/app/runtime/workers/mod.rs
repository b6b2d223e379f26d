//! Background workers. Each owns a request receiver and answers on a response sender.

mod detail;
mod page;
mod search;

pub use detail::spawn_detail_worker;
pub use page::spawn_page_worker;
pub use search::spawn_search_worker;
