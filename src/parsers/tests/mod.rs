mod article_parser_tests;
