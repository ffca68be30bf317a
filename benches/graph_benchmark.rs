use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matgraph::{MatrixGraph, MAX_VERTICES};

fn bench_vertex_churn(c: &mut Criterion) {
    c.bench_function("matrix_graph_fill_and_drain", |b| {
        b.iter(|| {
            let mut graph = MatrixGraph::<usize, i32>::undirected();
            let handles: Vec<_> = (0..MAX_VERTICES).map(|i| graph.insert_vertex(i)).collect();
            for v in handles {
                black_box(graph.remove_vertex(v).unwrap());
            }
        });
    });

    c.bench_function("matrix_graph_recycled_insert", |b| {
        let mut graph = MatrixGraph::<usize, i32>::undirected();
        let handles: Vec<_> = (0..MAX_VERTICES).map(|i| graph.insert_vertex(i)).collect();
        for v in handles {
            graph.remove_vertex(v).unwrap();
        }
        b.iter(|| {
            let v = graph.insert_vertex(black_box(7));
            graph.remove_vertex(v).unwrap();
        });
    });
}

fn bench_structural_queries(c: &mut Criterion) {
    let size = 128;
    let mut graph = MatrixGraph::<usize, i32>::undirected();
    let vertices: Vec<_> = (0..size).map(|i| graph.insert_vertex(i)).collect();
    // Chain plus some chords.
    for i in 0..size - 1 {
        graph.insert_edge(vertices[i], vertices[i + 1], 1).unwrap();
    }
    for i in 0..size / 4 {
        graph.insert_edge(vertices[i], vertices[size - 1 - i], 2).unwrap();
    }

    c.bench_function("matrix_graph_are_adjacent", |b| {
        b.iter(|| {
            for i in 0..size - 1 {
                black_box(graph.are_adjacent(vertices[i], vertices[i + 1]).unwrap());
            }
        });
    });

    c.bench_function("matrix_graph_incident_scan", |b| {
        b.iter(|| {
            for &v in vertices.iter().take(16) {
                black_box(graph.outgoing_edges(v).unwrap());
            }
        });
    });
}

criterion_group!(benches, bench_vertex_churn, bench_structural_queries);
criterion_main!(benches);
