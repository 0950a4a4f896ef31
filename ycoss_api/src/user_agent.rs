pub(crate) fn get_user_agent() -> &'static str {
    concat!("ycdash/", env!("CARGO_PKG_VERSION"))
}
