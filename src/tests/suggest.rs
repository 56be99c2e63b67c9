use crate::pageviews::TopArticle;
use crate::res::SearchHit;
use crate::suggest::{is_suggestible, rank_search, trending_titles};

fn hit(title: &str) -> SearchHit {
    SearchHit {
        ns: 0,
        title: title.into(),
        page_id: 1,
    }
}

fn top(article: &str) -> TopArticle {
    TopArticle {
        article: article.into(),
        views: 1,
        rank: 1,
    }
}

#[test]
fn hidden_namespaces() {
    for title in [
        "Help:Contents",
        "special:Random",
        "USER:Jimbo",
        "Wikipedia:About",
        "Category:Tea",
        "Template:Citation needed",
        "Template talk:Infobox",
    ] {
        let expected = title == "Template talk:Infobox";
        assert_eq!(expected, is_suggestible(title), "{title}");
    }
    assert!(!is_suggestible("List of articles with Citation Needed tags"));
    assert!(is_suggestible("Paris"));
}

#[test]
fn prefix_matches_come_first_in_server_order() {
    let hits = vec![
        hit("Oxidation"),
        hit("Rust Belt"),
        hit("Iron"),
        hit("rust (fungus)"),
        hit("Help:Rust"),
    ];
    let titles: Vec<_> = rank_search("Rust", hits)
        .into_iter()
        .map(|h| h.title)
        .collect();
    assert_eq!(
        vec!["Rust Belt", "rust (fungus)", "Oxidation", "Iron"],
        titles
    );
}

#[test]
fn trending_skips_main_page_and_limits() {
    let articles = vec![
        top("Main_Page"),
        top("Special:Search"),
        top("Dune:_Part_Two"),
        top("Oppenheimer_(film)"),
        top("Taylor_Swift"),
    ];
    assert_eq!(
        vec!["Dune: Part Two", "Oppenheimer (film)"],
        trending_titles(&articles, 2)
    );
    assert!(trending_titles(&[top("Main_Page")], 10).is_empty());
}
