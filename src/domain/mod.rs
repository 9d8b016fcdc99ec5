pub mod editorial;
