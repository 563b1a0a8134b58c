mod parse_good;
mod validate;
