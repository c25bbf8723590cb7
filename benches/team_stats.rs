// benches/team_stats.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ff_scrape::specs::team_stats;
use ff_scrape::teams;

/// League-sized page in the name-rows-then-data-rows layout, padded with
/// the kind of markup noise the live page carries.
fn synthetic_doc() -> String {
    let mut doc = String::from("<html><body><table class=\"Table\">");
    for t in teams::TEAMS {
        doc.push_str(&format!(
            r#"<tr class="Table__TR Table__TR--sm"><td class="Table__TD"><span></span><a href="#">{}</a></td></tr>"#,
            t.full_name()
        ));
    }
    for i in 0..teams::TEAMS.len() {
        doc.push_str(r#"<tr class="Table__TR Table__TR--sm"><td>"#);
        doc.push_str("<div>16</div><div>5,312</div>");
        doc.push_str(&format!(
            "<div>{}.2</div><div>3,104</div><div>{}.1</div><div>2,208</div><div>{}.7</div><div>412</div><div>{}.8</div>",
            300 + i,
            200 + i,
            100 + i,
            20 + i % 9
        ));
        doc.push_str("</td></tr>");
    }
    doc.push_str("</table></body></html>");
    doc
}

fn bench_team_stats(c: &mut Criterion) {
    let doc = synthetic_doc();

    c.bench_function("team_stats_parse", |b| {
        b.iter(|| {
            let bundle = team_stats::parse_doc(black_box(&doc)).expect("parse");
            black_box(bundle.teams.len())
        })
    });
}

criterion_group!(benches, bench_team_stats);
criterion_main!(benches);
