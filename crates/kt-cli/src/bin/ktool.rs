use clap::{Parser, Subcommand};

use kt_cli::commands::dict_ops;

#[derive(Parser)]
#[command(name = "ktool", about = "Binary dictionary build and query tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a dictionary image from text word lists
    Compile {
        /// Unigram file (`word weight` per line)
        #[arg(long)]
        unigrams: String,
        /// N-gram files (`word ... word weight` per line)
        #[arg(long)]
        ngrams: Vec<String>,
        /// Output image file
        output: String,
    },
    /// Show image header stats
    Info {
        /// Dictionary image file
        file: String,
    },
    /// Look up a word (prints `word weight`)
    Lookup {
        /// Dictionary image file
        dict_file: String,
        /// Word to look up
        word: String,
    },
    /// Predict next words after a context phrase
    Predict {
        /// Dictionary image file
        dict_file: String,
        /// Context words, in order
        words: Vec<String>,
        /// Maximum number of predictions
        #[arg(short, long, default_value = "10")]
        n: usize,
    },
    /// Spelling corrections within one edit
    Correct {
        /// Dictionary image file
        dict_file: String,
        /// Word to correct
        word: String,
        /// Maximum number of corrections
        #[arg(short, long, default_value = "10")]
        n: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Compile {
            unigrams,
            ngrams,
            output,
        } => dict_ops::compile(&unigrams, &ngrams, &output),
        Command::Info { file } => dict_ops::info(&file),
        Command::Lookup { dict_file, word } => dict_ops::lookup(&dict_file, &word),
        Command::Predict {
            dict_file,
            words,
            n,
        } => dict_ops::predict(&dict_file, &words, n),
        Command::Correct { dict_file, word, n } => dict_ops::correct(&dict_file, &word, n),
    }
}
