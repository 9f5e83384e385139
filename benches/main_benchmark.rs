use cppvend::config::VendorConfig;
use cppvend::vendor::filter::SelectionFilter;
use cppvend::vendor::include::IncludeDirective;
use cppvend::vendor::resolve::FileIndex;
use cppvend::vendor::rewrite::rewrite_text;
use criterion::{Criterion, criterion_group, criterion_main};
use std::fs;
use std::hint::black_box;
use std::path::PathBuf;

const MOCK_HEADER: &str = r#"#pragma once
#include <cstdint>
#include <string>
#include "detail/config.h"
#include "detail/format.h"

namespace widgets {
int render(const std::string& s);
}
"#;

fn bench_parse_include(c: &mut Criterion) {
    c.bench_function("parse_include_lines", |b| {
        b.iter(|| {
            for line in black_box(MOCK_HEADER).lines() {
                black_box(IncludeDirective::parse(line));
            }
        })
    });
}

fn bench_rewrite_text(c: &mut Criterion) {
    let target = PathBuf::from("/project/include/acme/widgets/config.h");
    c.bench_function("rewrite_header", |b| {
        b.iter(|| {
            rewrite_text(black_box(MOCK_HEADER.as_bytes()), |name| {
                Ok((name == "config.h").then(|| target.clone()))
            })
            .unwrap()
        })
    });
}

fn bench_scan_and_index(c: &mut Criterion) {
    let temp_dir = std::env::temp_dir().join("cppvend_bench_tree");
    if !temp_dir.exists() {
        for i in 0..50 {
            let dir = temp_dir.join(format!("mod{}", i % 5));
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(format!("unit{}.h", i)), MOCK_HEADER).unwrap();
            fs::write(dir.join(format!("part{}.h", i)), MOCK_HEADER).unwrap();
            fs::write(dir.join(format!("part{}.cpp", i)), "#include \"x.h\"\n").unwrap();
        }
    }

    let config = VendorConfig::default();
    let filter = SelectionFilter::new(&config);
    c.bench_function("classify_tree", |b| {
        b.iter(|| filter.scan(black_box(&temp_dir)).unwrap())
    });
    c.bench_function("build_file_index", |b| {
        b.iter(|| FileIndex::build(black_box(&temp_dir)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_parse_include,
    bench_rewrite_text,
    bench_scan_and_index
);
criterion_main!(benches);
