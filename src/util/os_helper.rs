/// Author name for new posts: the user's real name, or the login name when it is unset.
pub fn author_name() -> String {
    let real_name = whoami::realname();
    let real_name = real_name.trim();
    if real_name.is_empty() || real_name == "Unknown" {
        return whoami::username();
    }
    real_name.to_string()
}
