use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use kmer_tss::{kmer, logging, tss};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(
    name = "kmer-tss",
    author,
    version,
    about = "K-mer counting and nearest-TSS annotation",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Count all k-mers in a fasta file
    CountKmers {
        /// A fasta file to read in
        file: String,
        /// K-mer length
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        kmer: u64,
        /// Output file
        #[arg(short, long, default_value = "kmers.txt")]
        out: String,
        /// Verbose mode
        #[arg(short, long)]
        verbose: bool,
    },
    /// Append the distance to the nearest TSS to every interval of a BED-like file
    NearestTss {
        /// Intervals: chrom, start, end, extra fields (.gz for gzip)
        input: String,
        /// Annotated output (.gz for gzip)
        output: String,
        /// Two-column chrom/position reference
        #[arg(default_value = "hg19.tss.loci.gz")]
        reference: String,
        /// Field delimiter of both input files
        #[arg(short, long, default_value_t = '\t')]
        delimiter: char,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
        /// Verbose mode
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::CountKmers { file, kmer, out, verbose } => {
            logging::init(verbose);
            let opt = kmer::KmerOpt { k: kmer as usize, out };
            run_count_kmers(&file, &opt)
        }
        Commands::NearestTss { input, output, reference, delimiter, threads, verbose } => {
            logging::init(verbose);
            let opt = tss::TssOpt { reference, delimiter, threads };
            run_nearest_tss(&input, &output, &opt)
        }
    }
}

fn run_count_kmers(file: &str, opt: &kmer::KmerOpt) -> Result<()> {
    kmer::count_kmers(file, opt)
        .with_context(|| format!("counting {}-mers of '{}' into '{}'", opt.k, file, opt.out))?;
    Ok(())
}

fn run_nearest_tss(input: &str, output: &str, opt: &tss::TssOpt) -> Result<()> {
    tss::nearest_tss(input, output, opt).with_context(|| {
        format!("annotating '{}' with nearest TSS from '{}'", input, opt.reference)
    })?;
    Ok(())
}
