use crate::model::{Category, Question, QuestionId, Quiz, QuizError, QuizId};

fn question(
    id: &str,
    text: &str,
    options: &[&str],
    correct: usize,
    explanation: &str,
) -> Result<Question, QuizError> {
    Question::new(
        QuestionId::new(id),
        text,
        options.iter().map(|o| (*o).to_owned()).collect(),
        correct,
        explanation,
    )
}

pub(super) fn builtin_quizzes() -> Result<Vec<Quiz>, QuizError> {
    Ok(vec![html_quiz()?, css_quiz()?, js_quiz()?])
}

fn html_quiz() -> Result<Quiz, QuizError> {
    let questions = vec![
        question(
            "html-q1",
            "What does HTML stand for?",
            &[
                "Hyper Text Markup Language",
                "High Tech Modern Language",
                "Home Tool Markup Language",
                "Hyperlinks and Text Markup Language",
            ],
            0,
            "HTML stands for HyperText Markup Language, the standard language for creating web pages.",
        )?,
        question(
            "html-q2",
            "Which HTML tag is used for the largest heading?",
            &["<heading>", "<h6>", "<h1>", "<head>"],
            2,
            "<h1> is used for the largest and most important heading, while <h6> is the smallest.",
        )?,
        question(
            "html-q3",
            "What is the correct HTML for creating a hyperlink?",
            &[
                "<a url=\"http://example.com\">Example</a>",
                "<a href=\"http://example.com\">Example</a>",
                "<link>http://example.com</link>",
                "<hyperlink>http://example.com</hyperlink>",
            ],
            1,
            "The <a> tag with href attribute is used to create hyperlinks in HTML.",
        )?,
        question(
            "html-q4",
            "Which tag is used to define an unordered list?",
            &["<ol>", "<list>", "<ul>", "<li>"],
            2,
            "<ul> creates an unordered (bulleted) list, while <ol> creates ordered (numbered) lists.",
        )?,
        question(
            "html-q5",
            "What attribute specifies alternative text for an image?",
            &["title", "alt", "src", "text"],
            1,
            "The alt attribute provides alternative text for images, important for accessibility.",
        )?,
    ];
    Quiz::new(
        QuizId::new("html-quiz"),
        "HTML Fundamentals Quiz",
        Category::Html,
        questions,
        70,
    )
}

fn css_quiz() -> Result<Quiz, QuizError> {
    let questions = vec![
        question(
            "css-q1",
            "What does CSS stand for?",
            &[
                "Creative Style Sheets",
                "Cascading Style Sheets",
                "Computer Style Sheets",
                "Colorful Style Sheets",
            ],
            1,
            "CSS stands for Cascading Style Sheets, used to style HTML documents.",
        )?,
        question(
            "css-q2",
            "Which CSS property is used to change text color?",
            &["text-color", "font-color", "color", "text-style"],
            2,
            "The color property sets the color of text in CSS.",
        )?,
        question(
            "css-q3",
            "How do you select an element with class \"menu\"?",
            &["#menu", ".menu", "menu", "*menu"],
            1,
            "A period (.) before the name selects elements by class in CSS.",
        )?,
        question(
            "css-q4",
            "Which property is used to change background color?",
            &["bgcolor", "background-color", "color-background", "bg-color"],
            1,
            "background-color sets the background color of an element.",
        )?,
        question(
            "css-q5",
            "What is the correct CSS syntax for making all <p> bold?",
            &[
                "p {text-size: bold;}",
                "p {font-weight: bold;}",
                "<p style=\"text-size: bold;\">",
                "p {font-style: bold;}",
            ],
            1,
            "font-weight: bold; makes text bold in CSS.",
        )?,
    ];
    Quiz::new(
        QuizId::new("css-quiz"),
        "CSS Styling Quiz",
        Category::Css,
        questions,
        70,
    )
}

fn js_quiz() -> Result<Quiz, QuizError> {
    let questions = vec![
        question(
            "js-q1",
            "Inside which HTML element do we put JavaScript?",
            &["<javascript>", "<js>", "<script>", "<scripting>"],
            2,
            "JavaScript code is placed inside <script> tags in HTML.",
        )?,
        question(
            "js-q2",
            "How do you declare a JavaScript variable?",
            &["variable name;", "v name;", "let name;", "var: name;"],
            2,
            "Use let (or const) to declare variables in modern JavaScript.",
        )?,
        question(
            "js-q3",
            "Which operator is used to assign a value to a variable?",
            &["*", "=", "-", "x"],
            1,
            "The = operator assigns values to variables in JavaScript.",
        )?,
        question(
            "js-q4",
            "How do you call a function named \"myFunction\"?",
            &[
                "call myFunction()",
                "myFunction()",
                "call function myFunction",
                "execute myFunction()",
            ],
            1,
            "Functions are called using their name followed by parentheses.",
        )?,
        question(
            "js-q5",
            "How do you write a comment in JavaScript?",
            &[
                "<!-- This is a comment -->",
                "// This is a comment",
                "/* This is a comment",
                "** This is a comment",
            ],
            1,
            "// creates a single-line comment in JavaScript.",
        )?,
    ];
    Quiz::new(
        QuizId::new("js-quiz"),
        "JavaScript Basics Quiz",
        Category::Javascript,
        questions,
        70,
    )
}
