pub(crate) mod millis;
