pub mod label_list;
pub mod table;
