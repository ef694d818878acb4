//! Default values for terminal behaviour settings.

pub fn history_size() -> i32 {
    9001
}

pub fn cursor_height() -> u32 {
    25 // Percent of the cell, used by the vintage cursor
}

pub fn snap_on_input() -> bool {
    true
}

pub fn alt_gr_aliasing() -> bool {
    true
}

pub fn profile_name() -> String {
    "Default".to_string()
}

pub fn commandline() -> String {
    if cfg!(windows) {
        "cmd.exe".to_string()
    } else {
        "/bin/sh".to_string()
    }
}

pub fn word_delimiters() -> String {
    " /\\()\"'-.,:;<>~!@#$%^&*|+=[]{}~?\u{2502}".to_string()
}
