pub const EXAMPLES: &str = r#"EXAMPLES:

1) Default benchmark matrix:

    Run 128 requests with 128 workers for every scenario (io, cpu, nothing)
    against both default targets (gunicorn on :8000, uvicorn on :8001):

    $ cargo r --bin http-bench -r

2) Custom targets and scenarios:

    $ cargo r --bin http-bench -r -- \
        --target local=http://127.0.0.1:8080 \
        --scenario io=/do_io?time_s=0.5 \
        --requests 512 --workers 64

3) Configuration file and JSON report:

    $ cargo r --bin http-bench -r -- --config bench.toml --output-dir results

    where bench.toml looks like:

        requests = 128
        workers = 128

        [[targets]]
        name = "uvicorn"
        url = "http://10.0.0.2:80"

        [[scenarios]]
        name = "cpu"
        suffix = "/do_cpu?time_s=5"

    Values given on the command line take precedence over the file.
"#;

pub fn print_examples() {
    println!("{}", EXAMPLES);
}
