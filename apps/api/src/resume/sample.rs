/// Returned for document types the parser does not read (PDF, DOC, DOCX).
pub const SAMPLE_RESUME: &str = "John Doe
123 Main Street, City, Country | (123) 456-7890 | john.doe@email.com | linkedin.com/in/johndoe

PROFESSIONAL SUMMARY
Experienced software developer with 5+ years of experience in developing web applications using JavaScript, React, and Node.js. Strong background in building responsive user interfaces and RESTful APIs.

SKILLS
- Programming: JavaScript, TypeScript, HTML5, CSS3, Python
- Frameworks/Libraries: React, Redux, Node.js, Express.js, Jest, React Testing Library
- Tools: Git, Webpack, Docker, AWS, CI/CD pipelines
- Database: MongoDB, PostgreSQL, MySQL
- Methodologies: Agile, Scrum, TDD

EXPERIENCE
Senior Frontend Developer
XYZ Technologies | January 2020 - Present
- Led the development of a customer portal that improved user engagement by 35%
- Refactored legacy codebase which resulted in 40% improved load times
- Implemented responsive design principles ensuring compatibility across all devices
- Mentored junior developers and conducted code reviews

Web Developer
ABC Software | March 2017 - December 2019
- Developed and maintained multiple client websites using React.js and Node.js
- Collaborated with designers to implement UI/UX improvements
- Integrated third-party APIs for payment processing and data analytics
- Participated in Agile development cycles and sprint planning

EDUCATION
Bachelor of Science in Computer Science
University of Technology | 2013 - 2017

CERTIFICATIONS
- AWS Certified Developer - Associate
- MongoDB Certified Developer
- Professional Scrum Developer I

PROJECTS
E-commerce Platform
- Built a full-stack e-commerce platform using MERN stack
- Implemented secure payment processing with Stripe
- Designed responsive UI with React and Material-UI

Weather Dashboard Application
- Created a weather dashboard using OpenWeatherMap API
- Built with React Hooks and Context API for state management
- Implemented geolocation features for automatic weather updates";
