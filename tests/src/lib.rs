mod cylinder;
mod point;
mod polygon;
mod ray;
mod scene_description;
