use cli_screen::{factory, Result, BACKGROUND_NAMES, FOREGROUND_NAMES};

fn main() -> Result<()> {
    let screen = factory();
    print!("{}", screen.clear());
    println!(
        "{}",
        screen.center(&screen.underline("cli-screen color table"))
    );
    print!("{}", screen.newlines(1));

    for fg in FOREGROUND_NAMES {
        let mut line = format!("{fg:>12} ");
        for bg in BACKGROUND_NAMES {
            line.push_str(&screen.colorize(" Aa ", Some(fg), Some(bg))?);
        }
        println!("{line}");
    }

    print!("{}", screen.newlines(1));
    println!(
        "{} columns x {} rows, {}",
        screen.columns(),
        screen.rows(),
        if screen.is_utf8() { "UTF-8" } else { "single byte" }
    );
    Ok(())
}
