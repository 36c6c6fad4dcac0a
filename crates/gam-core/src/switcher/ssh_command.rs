/// `core.sshCommand` value that pins ssh to a single private key.
///
/// Backslashes become forward slashes so Windows paths survive git's
/// shell-style parsing, and `IdentitiesOnly` stops ssh from falling back to
/// agent or default keys.
pub fn ssh_command_for(key_path: &str) -> String {
    let key_path = key_path.replace('\\', "/");
    format!("ssh -i \"{key_path}\" -o IdentitiesOnly=yes")
}
