pub mod country;
pub mod division;
pub mod fighter;
