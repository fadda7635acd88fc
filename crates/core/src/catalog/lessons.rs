use crate::model::{Category, Difficulty, Lesson, LessonId};

#[allow(clippy::too_many_arguments)]
fn lesson(
    id: &str,
    title: &str,
    category: Category,
    difficulty: Difficulty,
    description: &str,
    content: &str,
    code_example: &str,
    practice_notes: &str,
) -> Lesson {
    Lesson {
        id: LessonId::new(id),
        title: title.to_owned(),
        category,
        difficulty,
        description: description.to_owned(),
        content: content.to_owned(),
        code_example: code_example.to_owned(),
        practice_notes: practice_notes.to_owned(),
    }
}

#[allow(clippy::too_many_lines)]
pub(super) fn builtin_lessons() -> Vec<Lesson> {
    use Category::{Css, Html, Javascript};
    use Difficulty::{Advanced, Beginner, Intermediate};

    vec![
        // HTML
        lesson(
            "html-1",
            "Introduction to HTML",
            Html,
            Beginner,
            "Learn the basics of HTML structure and elements",
            "HTML (HyperText Markup Language) is the standard markup language for creating web pages. It describes the structure of web pages using markup. HTML elements are the building blocks of HTML pages.",
            r"<!DOCTYPE html>
<html>
<head>
  <title>My First Page</title>
</head>
<body>
  <h1>Welcome to HTML</h1>
  <p>This is a paragraph.</p>
</body>
</html>",
            "Try creating your own HTML document with different headings and paragraphs.",
        ),
        lesson(
            "html-2",
            "HTML Headings and Paragraphs",
            Html,
            Beginner,
            "Understanding heading hierarchy and text formatting",
            "HTML headings are defined with <h1> to <h6> tags. <h1> defines the most important heading, while <h6> defines the least important. Paragraphs are defined with the <p> tag.",
            r"<h1>Main Heading</h1>
<h2>Subheading</h2>
<h3>Sub-subheading</h3>
<p>This is a paragraph of text that explains something important.</p>
<p>Another paragraph continues the explanation.</p>",
            "Create a blog post structure using different heading levels and multiple paragraphs.",
        ),
        lesson(
            "html-3",
            "HTML Links and Images",
            Html,
            Beginner,
            "Adding hyperlinks and images to your web pages",
            "Links are created using the <a> tag with an href attribute. Images are added using the <img> tag with src and alt attributes.",
            r#"<a href="https://example.com">Visit Example</a>
<a href="page2.html">Go to Page 2</a>

<img src="photo.jpg" alt="Description of photo" width="300">"#,
            "Create a page with navigation links and at least 3 images with proper alt text.",
        ),
        lesson(
            "html-4",
            "HTML Lists",
            Html,
            Beginner,
            "Creating ordered and unordered lists",
            "HTML supports ordered lists (<ol>) and unordered lists (<ul>). List items are defined with <li> tags.",
            r"<ul>
  <li>Coffee</li>
  <li>Tea</li>
  <li>Milk</li>
</ul>

<ol>
  <li>First step</li>
  <li>Second step</li>
  <li>Third step</li>
</ol>",
            "Create a shopping list (unordered) and a recipe with steps (ordered).",
        ),
        lesson(
            "html-5",
            "HTML Forms",
            Html,
            Intermediate,
            "Building interactive forms for user input",
            "Forms are used to collect user input. The <form> element contains various input elements like text fields, checkboxes, radio buttons, and submit buttons.",
            r#"<form action="/submit" method="post">
  <label for="name">Name:</label>
  <input type="text" id="name" name="name" required>

  <label for="email">Email:</label>
  <input type="email" id="email" name="email" required>

  <input type="submit" value="Submit">
</form>"#,
            "Create a contact form with name, email, message fields, and a submit button.",
        ),
        lesson(
            "html-6",
            "HTML Tables",
            Html,
            Intermediate,
            "Organizing data in tables",
            "Tables are defined with the <table> tag. Use <tr> for rows, <th> for header cells, and <td> for data cells.",
            r"<table>
  <tr>
    <th>Name</th>
    <th>Age</th>
    <th>City</th>
  </tr>
  <tr>
    <td>John</td>
    <td>25</td>
    <td>Manila</td>
  </tr>
</table>",
            "Create a table showing student grades with columns for name, subject, and score.",
        ),
        // CSS
        lesson(
            "css-1",
            "Introduction to CSS",
            Css,
            Beginner,
            "Styling web pages with CSS",
            "CSS (Cascading Style Sheets) is used to style HTML elements. It controls colors, fonts, spacing, layouts, and more. CSS can be inline, internal, or external.",
            r"/* External CSS file */
body {
  font-family: Arial, sans-serif;
  background-color: #f0f0f0;
}

h1 {
  color: #333;
  text-align: center;
}",
            "Create an external CSS file and link it to your HTML document.",
        ),
        lesson(
            "css-2",
            "CSS Selectors",
            Css,
            Beginner,
            "Targeting HTML elements with selectors",
            "CSS selectors are patterns used to select elements. Common selectors include element selectors, class selectors (.classname), and ID selectors (#idname).",
            r"/* Element selector */
p { color: blue; }

/* Class selector */
.highlight { background-color: yellow; }

/* ID selector */
#header { font-size: 24px; }",
            "Style different elements using various selector types in a single page.",
        ),
        lesson(
            "css-3",
            "CSS Box Model",
            Css,
            Intermediate,
            "Understanding margin, border, padding, and content",
            "The CSS box model consists of margins, borders, padding, and the content area. Every element is a box with these properties.",
            r".box {
  width: 300px;
  padding: 20px;
  border: 2px solid black;
  margin: 10px;
}",
            "Create boxes with different margin, padding, and border combinations.",
        ),
        lesson(
            "css-4",
            "CSS Flexbox",
            Css,
            Intermediate,
            "Creating flexible layouts with Flexbox",
            "Flexbox is a layout model that allows elements to align and distribute space within a container. It's perfect for creating responsive layouts.",
            r".container {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.item {
  flex: 1;
  margin: 10px;
}",
            "Build a navigation bar and a card layout using Flexbox.",
        ),
        lesson(
            "css-5",
            "CSS Grid",
            Css,
            Advanced,
            "Advanced layouts with CSS Grid",
            "CSS Grid is a powerful layout system for creating two-dimensional layouts. It allows you to create complex responsive designs easily.",
            r".grid-container {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 20px;
}

.grid-item {
  background: #ddd;
  padding: 20px;
}",
            "Create a photo gallery using CSS Grid with responsive columns.",
        ),
        lesson(
            "css-6",
            "CSS Animations",
            Css,
            Advanced,
            "Adding motion to your web pages",
            "CSS animations allow you to animate element properties over time using keyframes. You can create smooth transitions and complex animations.",
            r"@keyframes slideIn {
  from {
    transform: translateX(-100%);
    opacity: 0;
  }
  to {
    transform: translateX(0);
    opacity: 1;
  }
}

.animated {
  animation: slideIn 0.5s ease-out;
}",
            "Create a button with hover animations and a loading spinner.",
        ),
        // JavaScript
        lesson(
            "js-1",
            "Introduction to JavaScript",
            Javascript,
            Beginner,
            "Getting started with JavaScript programming",
            "JavaScript is a programming language that adds interactivity to web pages. It can update HTML content, change styles, validate forms, and much more.",
            r#"// Display a message
console.log("Hello, JavaScript!");

// Change HTML content
document.getElementById("demo").innerHTML = "Text changed!";

// Simple calculation
let sum = 5 + 3;
console.log(sum); // 8"#,
            "Write a script that displays your name in the console and changes text on a button click.",
        ),
        lesson(
            "js-2",
            "JavaScript Variables",
            Javascript,
            Beginner,
            "Storing and manipulating data with variables",
            "Variables are containers for storing data. Use let for variables that change, const for constants, and avoid var.",
            r#"let name = "Juan";
const age = 21;
let isStudent = true;

// Update variable
name = "Maria";

console.log(name); // Maria
console.log(age);  // 21"#,
            "Create variables for a user profile (name, age, city) and display them.",
        ),
        lesson(
            "js-3",
            "JavaScript Functions",
            Javascript,
            Beginner,
            "Creating reusable blocks of code",
            "Functions are reusable blocks of code. They can take parameters and return values. Functions help organize and reuse code.",
            r#"function greet(name) {
  return "Hello, " + name + "!";
}

const result = greet("Carlos");
console.log(result); // Hello, Carlos!

// Arrow function
const add = (a, b) => a + b;
console.log(add(5, 3)); // 8"#,
            "Create a calculator function that adds, subtracts, multiplies, and divides.",
        ),
        lesson(
            "js-4",
            "JavaScript Arrays",
            Javascript,
            Intermediate,
            "Working with lists of data",
            "Arrays are used to store multiple values in a single variable. You can access, modify, and iterate through array elements.",
            r#"const fruits = ["apple", "banana", "orange"];

// Access elements
console.log(fruits[0]); // apple

// Add element
fruits.push("mango");

// Loop through array
fruits.forEach(fruit => {
  console.log(fruit);
});"#,
            "Create an array of your favorite movies and display them on the page.",
        ),
        lesson(
            "js-5",
            "JavaScript Objects",
            Javascript,
            Intermediate,
            "Organizing data with objects",
            "Objects store collections of key-value pairs. They're perfect for representing real-world entities with properties and methods.",
            r#"const student = {
  name: "Ana",
  age: 20,
  course: "IT",
  greet: function() {
    return "Hi, I'm " + this.name;
  }
};

console.log(student.name); // Ana
console.log(student.greet()); // Hi, I'm Ana"#,
            "Create a book object with title, author, year, and a method to display info.",
        ),
        lesson(
            "js-6",
            "JavaScript DOM Manipulation",
            Javascript,
            Advanced,
            "Dynamically updating web pages",
            "The DOM (Document Object Model) represents the HTML structure. JavaScript can select, create, modify, and delete HTML elements dynamically.",
            r##"// Select element
const button = document.querySelector("#myButton");

// Add event listener
button.addEventListener("click", function() {
  // Create new element
  const p = document.createElement("p");
  p.textContent = "New paragraph!";
  document.body.appendChild(p);
});"##,
            "Build a todo list where users can add and remove items dynamically.",
        ),
    ]
}
