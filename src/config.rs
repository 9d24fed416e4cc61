use crate::constants::{DEBUG_TERMINAL_HEIGHT, DEBUG_TERMINAL_WIDTH};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchOptions {
    pub debug: bool,
    pub debug_width: u16,
    pub debug_height: u16,
    pub max_frames: Option<u64>,
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        LaunchOptions {
            debug: false,
            debug_width: DEBUG_TERMINAL_WIDTH,
            debug_height: DEBUG_TERMINAL_HEIGHT,
            max_frames: None,
            seed: None,
            verbose: false,
        }
    }
}

impl LaunchOptions {
    pub fn parse(args: &[String]) -> Result<LaunchOptions, String> {
        let mut options = LaunchOptions::default();
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--debug" => {
                    options.debug = true;
                    let positional: Vec<&String> = args[i + 1..]
                        .iter()
                        .take_while(|arg| !arg.starts_with("--"))
                        .take(3)
                        .collect();
                    match positional.len() {
                        0 => {}
                        1 => return Err("--debug needs both WIDTH and HEIGHT".to_string()),
                        _ => {
                            options.debug_width = parse_number(positional[0], "WIDTH")?;
                            options.debug_height = parse_number(positional[1], "HEIGHT")?;
                            if let Some(frames) = positional.get(2) {
                                options.max_frames = Some(parse_number(frames, "MAX_FRAMES")?);
                            }
                        }
                    }
                    i += positional.len();
                }
                "--frames" => {
                    options.max_frames = Some(parse_number(value_after(args, i, "--frames")?, "--frames")?);
                    i += 1;
                }
                "--seed" => {
                    options.seed = Some(parse_number(value_after(args, i, "--seed")?, "--seed")?);
                    i += 1;
                }
                "--verbose" => options.verbose = true,
                other => return Err(format!("unknown argument: {}", other)),
            }
            i += 1;
        }
        if options.debug && (options.debug_width == 0 || options.debug_height == 0) {
            return Err("debug screen must be at least 1x1".to_string());
        }
        Ok(options)
    }
}

fn value_after<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a String, String> {
    args.get(i + 1).ok_or_else(|| format!("{} needs a value", flag))
}

fn parse_number<T: std::str::FromStr>(value: &str, what: &str) -> Result<T, String> {
    value
        .parse::<T>()
        .map_err(|_| format!("invalid value for {}: {}", what, value))
}
