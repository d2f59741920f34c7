mod collections;
mod other;
mod primitives;
mod ptrs;
