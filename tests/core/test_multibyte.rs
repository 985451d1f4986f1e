// Multibyte content: CJK segmentation, emoji and right-to-left scripts

use std::fs;

use crate::common::{loaded_test_services, unicode_tokenizer, TestCorpus};
use tadpole::core::config::{CorpusConfig, TokenizerBackend, TokenizerConfig};
use tadpole::core::indexer::CorpusLoader;
use tadpole::core::tokenizer::build_tokenizer;

#[tokio::test]
async fn test_chinese_with_unicode_tokenizer() {
    let corpus = TestCorpus::small();
    let services = loaded_test_services(corpus.path()).await;

    let faqs = services.query("乱码").unwrap();

    assert_eq!(faqs.len(), 1);
    assert_eq!(faqs[0].question, "* git log 显示乱码");
    assert_eq!(faqs[0].question_line_num, 4);
}

#[test]
fn test_chinese_with_dictionary_tokenizer() {
    let corpus = TestCorpus::with_files(&[
        (
            "notes/bridge.org",
            "* 南京市长江大桥\n长江大桥是一座公路铁路两用桥\n",
        ),
        ("notes/city.org", "* 上海市\n上海市位于长江入海口\n"),
    ]);
    let dict = corpus.path().join("dict.txt");
    fs::write(&dict, "南京市 5 ns\n长江大桥 3 ns\n长江 9 ns\n上海市 8 ns\n入海口 2 n\n").unwrap();

    let tokenizer = build_tokenizer(&TokenizerConfig {
        backend: TokenizerBackend::Dictionary,
        dictionary_path: Some(dict),
        ..TokenizerConfig::default()
    })
    .unwrap();
    let config = CorpusConfig {
        include_patterns: vec!["*.org".to_string()],
        ..CorpusConfig::default()
    };
    let loader = CorpusLoader::from_config(&config, tokenizer).unwrap();

    let (index, _) = loader.load_corpus(corpus.path()).unwrap();

    assert_eq!(index.query_docs("长江大桥").unwrap().len(), 1);
    assert_eq!(index.query_docs("长江").unwrap().len(), 1);
    assert_eq!(index.query_docs("上海市").unwrap()[0].title, "* 上海市");
    // Longest match keeps 南京市 whole
    assert_eq!(index.query_docs("南京市").unwrap().len(), 1);
}

#[test]
fn test_emoji_and_rtl_content() {
    let corpus = TestCorpus::with_files(&[(
        "mixed.org",
        "* 🚀 Deploy checklist\nرسالة مرحبا before release ✅\n* Привет мир\nкириллица 👋\n",
    )]);
    let loader = CorpusLoader::from_config(&CorpusConfig::default(), unicode_tokenizer()).unwrap();

    let (index, stats) = loader.load_corpus(corpus.path()).unwrap();

    assert_eq!(stats.documents_indexed, 2);
    assert_eq!(index.query_docs("deploy").unwrap().len(), 1);
    assert_eq!(index.query_docs("مرحبا").unwrap().len(), 1);
    assert_eq!(index.query_docs("привет").unwrap()[0].start_line, 3);
}
