mod arc433;

pub use arc433::Arc433;
