//! Canonical Java snippet offered by the "load example" action.

/// A small class touching most of the rewrite rules.
pub const EXAMPLE_JAVA: &str = r#"public class HelloWorld {
    private String message;
    
    public HelloWorld(String message) {
        this.message = message;
    }
    
    public void sayHello() {
        System.out.println(message);
    }
    
    public String getMessage() {
        return this.message;
    }
    
    public void setMessage(String newMessage) {
        this.message = newMessage;
    }
    
    public static void main(String[] args) {
        HelloWorld hello = new HelloWorld("Hallo Welt!");
        hello.sayHello();
        
        for(int i = 0; i < 5; i++) {
            System.out.println("Zähler: " + i);
        }
        
        int[] numbers = new int[3];
        numbers[0] = 1;
        numbers[1] = 2;
        numbers[2] = 3;
    }
}"#;
