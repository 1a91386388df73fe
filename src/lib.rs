pub mod audio;
pub mod camera;
pub mod clock;
pub mod config;
pub mod doors;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hooks;
pub mod input;
pub mod interaction;
pub mod lesson;
pub mod map;
pub mod objects;
pub mod render;
pub mod tiles;
pub mod ui;
pub mod window;
pub mod world;
