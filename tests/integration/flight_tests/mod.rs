mod input;
mod pipeline;
