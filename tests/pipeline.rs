use std::fs;
use std::io::{Read, Write};

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use kmer_tss::kmer::{self, KmerOpt};
use kmer_tss::tss::{self, TssOpt};
use kmer_tss::KmerTssError;

fn write_gz(path: &std::path::Path, data: &[u8]) {
    let mut enc = GzEncoder::new(fs::File::create(path).unwrap(), Compression::default());
    enc.write_all(data).unwrap();
    enc.finish().unwrap();
}

fn read_gz(path: &std::path::Path) -> String {
    let mut s = String::new();
    MultiGzDecoder::new(fs::File::open(path).unwrap()).read_to_string(&mut s).unwrap();
    s
}

#[test]
fn count_kmers_writes_crlf_table() {
    let dir = tempfile::tempdir().unwrap();
    let fa = dir.path().join("in.fa");
    fs::write(&fa, ">s1 desc\nACGT\nacg\n>s2\nAAAA\n").unwrap();
    let out = dir.path().join("kmers.txt");
    let opt = KmerOpt { k: 3, out: out.to_str().unwrap().to_string() };

    let table = kmer::count_kmers(&fa, &opt).unwrap();
    // s1 = ACGTACG (7) -> 4 windows; s2 = AAAA (4) -> 1 window
    assert_eq!(table.total(), 5);

    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(text, "AAA\t1\r\nACG\t1\r\nCGT\t1\r\nGTA\t1\r\nTAC\t1\r\n");
}

#[test]
fn count_kmers_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("kmers.txt");
    let opt = KmerOpt { k: 2, out: out.to_str().unwrap().to_string() };
    let err = kmer::count_kmers(dir.path().join("absent.fa"), &opt).unwrap_err();
    assert!(matches!(err, KmerTssError::Io(_)));
    assert!(!out.exists());
}

#[test]
fn nearest_tss_gzip_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let reference = dir.path().join("tss.loci.gz");
    write_gz(&reference, b"chr1\t500\nchr1\t100\nchr2\t50\nchr1\t100\n");

    let input = dir.path().join("peaks.bed.gz");
    write_gz(
        &input,
        concat!(
            "chrom\tstart\tend\tname\n",
            "chr1\t90\t110\tp1\n",
            "chr11_gl000202_random\t1\t2\tp2\n",
            "chr1\t300\t310\tp3\n",
            "chr2\t60\t60\tp4\n",
        )
        .as_bytes(),
    );
    let output = dir.path().join("out.bed.gz");

    let opt = TssOpt { reference: reference.to_str().unwrap().to_string(), ..TssOpt::default() };
    let res = tss::nearest_tss(input.to_str().unwrap(), output.to_str().unwrap(), &opt).unwrap();
    assert_eq!(res.annotated, 3);
    assert_eq!(res.dropped, 1);

    assert_eq!(
        read_gz(&output),
        concat!(
            "chrom\tstart\tend\tname\ttss.distance\n",
            "chr1\t90\t110\tp1\t0\n",
            "chr1\t300\t310\tp3\t195\n",
            "chr2\t60\t60\tp4\t10\n",
        )
    );
}

#[test]
fn nearest_tss_plain_files_and_threads() {
    let dir = tempfile::tempdir().unwrap();
    let reference = dir.path().join("tss.txt");
    fs::write(&reference, "chr1\t10\nchr1\t20\nchr1\t30\n").unwrap();

    let mut bed = String::new();
    let mut expected = String::new();
    for i in 0..500i64 {
        bed.push_str(&format!("chr1\t{}\t{}\n", i, i));
        let d = [10i64, 20, 30].iter().map(|t| (t - i).abs()).min().unwrap();
        expected.push_str(&format!("chr1\t{}\t{}\t{}\n", i, i, d));
    }
    let input = dir.path().join("in.bed");
    fs::write(&input, &bed).unwrap();
    let output = dir.path().join("out.bed");

    let opt = TssOpt {
        reference: reference.to_str().unwrap().to_string(),
        threads: 4,
        ..TssOpt::default()
    };
    tss::nearest_tss(input.to_str().unwrap(), output.to_str().unwrap(), &opt).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn bad_reference_aborts_before_output() {
    let dir = tempfile::tempdir().unwrap();
    let reference = dir.path().join("tss.txt");
    fs::write(&reference, "chr1\t10\nchr1\tten\n").unwrap();
    let input = dir.path().join("in.bed");
    fs::write(&input, "chr1\t1\t2\n").unwrap();
    let output = dir.path().join("out.bed");

    let opt = TssOpt { reference: reference.to_str().unwrap().to_string(), ..TssOpt::default() };
    let err = tss::nearest_tss(input.to_str().unwrap(), output.to_str().unwrap(), &opt)
        .unwrap_err();
    assert!(matches!(err, KmerTssError::ReferenceParse { line: 2, .. }));
    assert!(!output.exists());
}

#[test]
fn short_interval_aborts_without_partial_output() {
    let dir = tempfile::tempdir().unwrap();
    let reference = dir.path().join("tss.txt");
    fs::write(&reference, "chr1\t10\n").unwrap();
    let input = dir.path().join("in.bed");
    fs::write(&input, "chr1\t1\t2\nchr1\t3\n").unwrap();
    let output = dir.path().join("out.bed");

    let opt = TssOpt { reference: reference.to_str().unwrap().to_string(), ..TssOpt::default() };
    let err = tss::nearest_tss(input.to_str().unwrap(), output.to_str().unwrap(), &opt)
        .unwrap_err();
    assert!(matches!(err, KmerTssError::IntervalParse { .. }));
    assert!(!output.exists());
}
