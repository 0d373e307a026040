mod evaluation;
mod from_root;
