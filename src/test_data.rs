#[cfg(test)]
pub const POST_DATA_MD: &str = "<!--
[ID]: # (a63bd715-a3fe-4788-b0e1-2a3153778544)
[DATE]: # (2022-04-02 12:05:00.000)
[AUTHOR]: # (someone)
[TAGS]: # (career programming)
-->

# What I learned after 20+ years of software development
How to be a great software engineer?

Someone asked me this question today and I didn't have an answer.

<!-- more -->

## Non technical
";

#[cfg(test)]
pub const POST_DATA_HTML: &str = "[ID]: # (0b3c2f57-3f2c-4a36-9e0e-6f1f0b1d2b11)
[DATE]: # (2023-01-01 09:30:00)
[AUTHOR]: # (someone)

<h1 class=\"title\">An HTML post</h1>
<p>Written by hand.</p>
";
