use ritrends::analytics::Analyzer;
use ritrends::config::Config;

pub fn tokenize(config: &Config, titles: &[String], themes: bool) {
    let analyzer = Analyzer::from_config(config);
    let tokenizer = analyzer.tokenizer();

    for title in titles {
        let tokens = tokenizer.tokenize(title);
        if themes {
            println!("{title}\t{}\t[{}]", tokens.join(" "), tokenizer.themes_of(title).join(", "));
        } else {
            println!("{title}\t{}", tokens.join(" "));
        }
    }
}
