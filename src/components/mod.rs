pub mod treemap;
