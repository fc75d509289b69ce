pub mod review;
pub mod venue;
