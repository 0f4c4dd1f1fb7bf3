pub mod interest;
