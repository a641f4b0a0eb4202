mod common;
mod evaluation;
mod rubric;
