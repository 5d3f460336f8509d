pub mod avltree;
pub mod printer;
