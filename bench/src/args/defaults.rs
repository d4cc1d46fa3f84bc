pub const DEFAULT_REQUESTS: u32 = 128;
pub const DEFAULT_WORKERS: u32 = 128;
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const DEFAULT_TARGETS: [(&str, &str); 2] = [
    ("gunicorn", "http://127.0.0.1:8000"),
    ("uvicorn", "http://127.0.0.1:8001"),
];

pub const DEFAULT_SCENARIOS: [(&str, &str); 3] = [
    ("io", "/do_io?time_s=1"),
    ("cpu", "/do_cpu?time_s=5"),
    ("nothing", "/do_io?time_s=0"),
];
