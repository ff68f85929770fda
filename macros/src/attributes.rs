pub(crate) mod global_sink;
