mod tiles;
mod tour;

use bag::{
    random::{
        self,
        SmallRng,
    },
    ArrayBag,
    Bag,
    Error,
    ListBag,
};
use std::{
    fmt::Display,
    str::FromStr,
};
use structopt::StructOpt;

/// Prints a status line unless the run is quiet.
macro_rules! status {
    ($opt:expr, $($arg:tt)*) => {
        if !$opt.quiet {
            println!($($arg)*);
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    Array,
    List,
    Both,
}

impl Backend {
    fn runs_array(self) -> bool {
        matches!(self, Self::Array | Self::Both)
    }

    fn runs_list(self) -> bool {
        matches!(self, Self::List | Self::Both)
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "array" => Ok(Self::Array),
            "list" => Ok(Self::List),
            "both" => Ok(Self::Both),
            _ => Err(format!("unknown backend `{}`, expected array, list or both", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Demo {
    Deal,
    Tour,
    All,
}

impl Demo {
    fn runs_deal(self) -> bool {
        matches!(self, Self::Deal | Self::All)
    }

    fn runs_tour(self) -> bool {
        matches!(self, Self::Tour | Self::All)
    }
}

impl FromStr for Demo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deal" => Ok(Self::Deal),
            "tour" => Ok(Self::Tour),
            "all" => Ok(Self::All),
            _ => Err(format!("unknown demo `{}`, expected deal, tour or all", s)),
        }
    }
}

#[derive(StructOpt, Debug)]
#[structopt(name = "tile-bag", about = "Draws letter tiles from array and list backed bags.")]
struct Opt {
    /// Seeds the generator shared by every bag of the run.
    #[structopt(long)]
    seed: Option<u64>,
    /// The number of tiles to draw into the rack.
    #[structopt(long, default_value = "7")]
    tiles: usize,
    /// The bag implementation to use: array, list or both.
    #[structopt(long, default_value = "both")]
    backend: Backend,
    /// Prints results only, without status lines.
    #[structopt(short, long)]
    quiet: bool,
    /// The demo to run: deal, tour or all.
    #[structopt(name = "demo", default_value = "all")]
    demo: Demo,
}

fn main() -> Result<(), Error> {
    let opt = Opt::from_args();
    let mut rng = match opt.seed {
        Some(seed) => random::seeded_rng(seed),
        None => random::entropy_rng(),
    };
    if opt.backend.runs_list() {
        run(&opt, &mut rng, "list", <ListBag<&'static str>>::new)?;
    }
    if opt.backend.runs_array() {
        run(&opt, &mut rng, "array", <ArrayBag<&'static str>>::new)?;
    }
    Ok(())
}

/// Runs the selected demos with bags created by `new_bag`.
fn run<B, F>(opt: &Opt, rng: &mut SmallRng, name: &str, new_bag: F) -> Result<(), Error>
where
    B: Bag<&'static str> + Display,
    F: Fn() -> B,
{
    if opt.demo.runs_deal() {
        status!(opt, "dealing tiles from a {} bag ...", name);
        let mut pool = new_bag();
        let mut rack = new_bag();
        tiles::fill_pool(&mut pool, tiles::LETTER_FREQUENCIES)?;
        println!("pool size: {}", pool.len());
        let drawn = tiles::draw_rack(&mut pool, &mut rack, opt.tiles, rng)?;
        status!(opt, "drew {} of {} requested tiles", drawn, opt.tiles);
        println!("your letters: {}", rack);
        println!("pool size: {}", pool.len());
    }
    if opt.demo.runs_tour() {
        status!(opt, "touring a {} bag ...", name);
        for line in tour::run(new_bag(), rng)? {
            println!("{}", line);
        }
    }
    Ok(())
}
