use criterion::{criterion_group, criterion_main, Criterion};

use gbuild::script::Interp;

fn arithmetic_script(statements: usize) -> String {
    let mut src = String::from("let acc = 0;\n");
    for i in 0..statements {
        src.push_str(&format!("acc = acc + {i} * 3 - ({i} + 1);\n"));
    }
    src
}

fn string_script(statements: usize) -> String {
    let mut src = String::from("let s = \"x\";\n");
    for _ in 0..statements {
        src.push_str("s = cut(s + \"abcdef\", 0, 3);\n");
    }
    src
}

fn bench_eval(c: &mut Criterion) {
    let arith = arithmetic_script(200);
    c.bench_function("arith_200_stmts", |b| {
        b.iter(|| {
            let mut interp = Interp::new(&arith).unwrap();
            interp.run().unwrap()
        })
    });

    let strings = string_script(200);
    c.bench_function("string_200_stmts", |b| {
        b.iter(|| {
            let mut interp = Interp::new(&strings).unwrap();
            interp.run().unwrap()
        })
    });
}

criterion_group!(benches, bench_eval);
criterion_main!(benches);
