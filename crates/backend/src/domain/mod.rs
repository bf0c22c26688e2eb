pub mod a001_sector_tree;
pub mod a002_user_sector;
